use crate::model::Role;

/// Top-level view shown for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Login,
    Uploader,
    Student,
}

pub fn surface_for(role: Role) -> Surface {
    match role {
        Role::Anonymous => Surface::Login,
        Role::Uploader => Surface::Uploader,
        Role::Student => Surface::Student,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_role_has_its_surface() {
        assert_eq!(surface_for(Role::Anonymous), Surface::Login);
        assert_eq!(surface_for(Role::Uploader), Surface::Uploader);
        assert_eq!(surface_for(Role::Student), Surface::Student);
    }
}
