//! User entity.

/// A stored user record.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl User {
    /// Builds a stored record from an id and its mutable fields.
    pub fn from_fields(id: i64, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            age: fields.age,
        }
    }

    /// Replaces every mutable field, keeping `id`.
    pub fn apply(&mut self, fields: UserFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.age = fields.age;
    }
}

/// Client-controlled fields of a user.
///
/// Used for both creation and update; updates always replace all three
/// fields together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub age: i32,
}
