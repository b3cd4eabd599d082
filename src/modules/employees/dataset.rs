use super::models::{Department, Employee, Job};

fn accounting() -> Department {
    Department {
        deptno: 10,
        dname: "ACCOUNTING".to_string(),
        loc: "NEW YORK".to_string(),
    }
}

fn research() -> Department {
    Department {
        deptno: 20,
        dname: "RESEARCH".to_string(),
        loc: "DALLAS".to_string(),
    }
}

fn sales() -> Department {
    Department {
        deptno: 30,
        dname: "SALES".to_string(),
        loc: "CHICAGO".to_string(),
    }
}

fn employee(empno: i32, ename: &str, job: Job, sal: i32, departamento: Department) -> Employee {
    Employee {
        empno,
        ename: ename.to_string(),
        job,
        sal,
        departamento,
    }
}

/// The fourteen SCOTT employees, in `empno` order.
pub fn employees() -> Vec<Employee> {
    vec![
        employee(7369, "SMITH", Job::Clerk, 800, research()),
        employee(7499, "ALLEN", Job::Salesman, 1600, sales()),
        employee(7521, "WARD", Job::Salesman, 1250, sales()),
        employee(7566, "JONES", Job::Manager, 2975, research()),
        employee(7654, "MARTIN", Job::Salesman, 1250, sales()),
        employee(7698, "BLAKE", Job::Manager, 2850, sales()),
        employee(7782, "CLARK", Job::Manager, 2450, accounting()),
        employee(7788, "SCOTT", Job::Analyst, 3000, research()),
        employee(7839, "KING", Job::President, 5000, accounting()),
        employee(7844, "TURNER", Job::Salesman, 1500, sales()),
        employee(7876, "ADAMS", Job::Clerk, 1100, research()),
        employee(7900, "JAMES", Job::Clerk, 950, sales()),
        employee(7902, "FORD", Job::Analyst, 3000, research()),
        employee(7934, "MILLER", Job::Clerk, 1300, accounting()),
    ]
}
