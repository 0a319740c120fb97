use std::fmt::Display;

/// The four remote operations, doubling as the user-visible failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// The fixed message shown to the operator when this operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch users. Please try again later.",
            Operation::Create => "Failed to add user. Please try again.",
            Operation::Update => "Failed to edit user. Please try again.",
            Operation::Delete => "Failed to delete user. Please try again.",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}
