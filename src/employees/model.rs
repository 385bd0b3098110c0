//! Employee record as exchanged with the upstream service and returned by
//! the facade.

use std::hash::{Hash, Hasher};

use serde::{de, Deserialize, Deserializer, Serialize};

/// A single employee.
///
/// Field names on the wire follow the upstream (`employee_name`, ...). The
/// short names are accepted as aliases because the upstream's create
/// endpoint echoes the request keys back.
///
/// Two employees are equal when their ids are equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub id: i64,

    #[serde(rename = "employee_name", alias = "name", default)]
    pub name: String,

    #[serde(
        rename = "employee_salary",
        alias = "salary",
        default,
        deserialize_with = "lenient_i64"
    )]
    pub salary: i64,

    #[serde(
        rename = "employee_age",
        alias = "age",
        default,
        deserialize_with = "lenient_i64"
    )]
    pub age: i64,

    #[serde(default)]
    pub profile_image: Option<String>,
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Accepts `42` as well as `"42"`; the upstream is inconsistent about it.
/// `null` reads as 0.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(i64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumberOrText::Number(n)) => Ok(n),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected an integer, got '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deserialize_upstream_record() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":1,"employee_name":"Tiger Nixon","employee_salary":320800,"employee_age":61,"profile_image":""}"#,
        )
        .unwrap();

        assert_eq!(employee.id, 1);
        assert_eq!(employee.name, "Tiger Nixon");
        assert_eq!(employee.salary, 320800);
        assert_eq!(employee.age, 61);
        assert_eq!(employee.profile_image.as_deref(), Some(""));
    }

    #[test]
    fn test_deserialize_create_echo() {
        let employee: Employee =
            serde_json::from_str(r#"{"name":"newName","salary":"100000","age":"31","id":25}"#)
                .unwrap();

        assert_eq!(employee.id, 25);
        assert_eq!(employee.name, "newName");
        assert_eq!(employee.salary, 100000);
        assert_eq!(employee.age, 31);
        assert!(employee.profile_image.is_none());
    }

    #[test]
    fn test_null_numbers_read_as_zero() {
        let employee: Employee = serde_json::from_str(
            r#"{"id":null,"employee_name":"A","employee_salary":null,"employee_age":null,"profile_image":null}"#,
        )
        .unwrap();

        assert_eq!(employee.id, 0);
        assert_eq!(employee.name, "A");
        assert_eq!(employee.salary, 0);
        assert_eq!(employee.age, 0);
    }

    #[test]
    fn test_list_survives_record_with_null_salary() {
        let employees: Vec<Employee> = serde_json::from_str(
            r#"[{"id":1,"employee_name":"A","employee_salary":null,"employee_age":30},
                {"id":2,"employee_name":"B","employee_salary":500,"employee_age":40}]"#,
        )
        .unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].salary, 0);
        assert_eq!(employees[1].salary, 500);
    }

    #[test]
    fn test_rejects_non_numeric_salary() {
        let result = serde_json::from_str::<Employee>(r#"{"id":1,"employee_salary":"lots"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_upstream_names() {
        let employee = Employee {
            id: 0,
            name: "newName".into(),
            salary: 100000,
            age: 31,
            profile_image: None,
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["employee_name"], "newName");
        assert_eq!(value["employee_salary"], 100000);
        assert_eq!(value["employee_age"], 31);
        assert!(value["profile_image"].is_null());
    }

    #[test]
    fn test_identity_is_id() {
        let a = Employee {
            id: 7,
            name: "A".into(),
            ..Default::default()
        };
        let b = Employee {
            id: 7,
            name: "B".into(),
            salary: 1,
            ..Default::default()
        };
        assert_eq!(a, b);

        let set: HashSet<Employee> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
