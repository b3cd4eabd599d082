use serde::{Deserialize, Serialize};

/// Department embedded in every employee document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department number
    pub deptno: i32,
    /// Department name
    pub dname: String,
    /// City the department is located in
    pub loc: String,
}

/// Role category of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Job {
    Clerk,
    Salesman,
    Manager,
    Analyst,
    President,
}

/// Employee document stored in the `rh` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee number, unique across the collection
    pub empno: i32,
    /// Employee name
    pub ename: String,
    pub job: Job,
    /// Monthly salary in whole units
    pub sal: i32,
    pub departamento: Department,
}
