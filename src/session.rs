// src/session.rs
//
// Who is logged in and what they may do. A `Session` is an explicit value
// handed to the data source, the router guard and the page builders; there
// is no process-wide current user.

use std::collections::HashSet;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Teacher,
    DepartmentHead,
    ResourceManager,
    Technician,
    Supplier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    ViewNeeds,
    SubmitNeeds,
    ValidateNeeds,
    ViewResources,
    ManageResources,
    ReportFailures,
    ViewReports,
    HandleInterventions,
    ViewCalls,
    PublishCalls,
    SubmitOffers,
    ReviewOffers,
    ViewDeliveries,
    ConfirmDeliveries,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::Teacher,
        Role::DepartmentHead,
        Role::ResourceManager,
        Role::Technician,
        Role::Supplier,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::DepartmentHead => "Department head",
            Role::ResourceManager => "Resource manager",
            Role::Technician => "Technician",
            Role::Supplier => "Supplier",
        }
    }

    pub fn permissions(self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::Teacher => &[ViewNeeds, SubmitNeeds, ViewResources, ReportFailures],
            Role::DepartmentHead => &[ViewNeeds, SubmitNeeds, ValidateNeeds, ViewResources, ReportFailures],
            Role::ResourceManager => &[
                ViewNeeds, ViewResources, ManageResources, ViewReports,
                ViewCalls, PublishCalls, ReviewOffers, ViewDeliveries, ConfirmDeliveries,
            ],
            Role::Technician => &[ViewResources, ViewReports, HandleInterventions],
            Role::Supplier => &[ViewCalls, SubmitOffers, ViewDeliveries],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub role: Role,
    /// Unset for users not attached to a department (suppliers, staff).
    pub department: Option<String>,
}

impl User {
    pub fn new(id: u32, name: &str, role: Role, department: Option<&str>) -> Self {
        Self { id, name: s!(name), role, department: department.map(String::from) }
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    pub user: User,
    permissions: HashSet<Permission>,
}

impl Session {
    pub fn new(user: User) -> Self {
        let permissions = user.role.permissions().iter().copied().collect();
        Self { user, permissions }
    }

    #[inline]
    pub fn can(&self, p: Permission) -> bool { self.permissions.contains(&p) }

    #[inline]
    pub fn has_role(&self, role: Role) -> bool { self.user.role == role }

    #[inline]
    pub fn role(&self) -> Role { self.user.role }

    /// Same department as the user; false when either side has none.
    pub fn same_department(&self, department: Option<&str>) -> bool {
        matches!((self.user.department.as_deref(), department), (Some(a), Some(b)) if a == b)
    }

    pub fn permissions(&self) -> Vec<Permission> {
        let mut v: Vec<Permission> = self.permissions.iter().copied().collect();
        v.sort();
        v
    }
}

/// Accounts offered by the login panel. Authentication is out of scope:
/// logging in means picking one of these.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "Amina Benali", Role::Teacher, Some("Informatique")),
        User::new(2, "Lucas Martin", Role::Teacher, Some("Mathématiques")),
        User::new(3, "Claire Dubois", Role::DepartmentHead, Some("Informatique")),
        User::new(4, "Youssef Haddad", Role::ResourceManager, None),
        User::new(5, "Hugo Lefèvre", Role::Technician, None),
        User::new(6, "Bureautique Pro", Role::Supplier, None),
        User::new(7, "TechnoPlus SARL", Role::Supplier, None),
    ]
}

pub fn find_user(key: &str) -> Option<User> {
    let key = key.trim();
    demo_users().into_iter().find(|u| {
        u.id.to_string() == key || crate::table::fold(&u.name) == crate::table::fold(key)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_follow_role() {
        let s = Session::new(User::new(9, "X", Role::Technician, None));
        assert!(s.can(Permission::HandleInterventions));
        assert!(!s.can(Permission::ValidateNeeds));
    }

    #[test]
    fn no_department_never_matches() {
        let s = Session::new(User::new(9, "X", Role::DepartmentHead, None));
        assert!(!s.same_department(Some("Informatique")));
        assert!(!s.same_department(None));
    }

    #[test]
    fn find_user_by_id_or_name() {
        assert_eq!(find_user("4").map(|u| u.role), Some(Role::ResourceManager));
        assert_eq!(find_user("hugo lefevre").map(|u| u.id), Some(5));
    }
}
