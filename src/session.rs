pub type UserId = String;

/// Identity of the signed-in user, handed to the form when it submits.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: UserId,
}

impl Session {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}
