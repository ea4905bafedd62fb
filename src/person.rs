use std::fmt;

/// A record with a single mutable identifier.
///
/// Both accessors build their aggregates fresh on every call. [`Person::details`]
/// also writes to the receiver, which is why it takes `&mut self` rather than
/// hiding the mutation behind a read-looking signature.
#[derive(Debug, Default)]
pub struct Person {
    pub id: i32,
}

/// Named triple returned by [`Person::details`].
///
/// Field order is fixed at declaration and preserved by [`fmt::Display`] and by
/// any pattern that takes the value apart. Once constructed, the value is
/// independent of the `Person` it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonDetails {
    pub id: i32,
    pub name: String,
    pub age: u32,
}

impl fmt::Display for PersonDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.name, self.age)
    }
}

impl Person {
    pub fn new() -> Self {
        Self { id: 0 }
    }

    /// Name and age as a positional pair.
    ///
    /// Position 0 is the name, position 1 the age; nothing but convention says
    /// so. Never touches the receiver.
    pub fn name_age_pair(&self) -> (String, u32) {
        ("Scott".to_string(), 20)
    }

    /// Details as a named triple.
    ///
    /// Sets `self.id = 1` before composing the return value, so the returned
    /// `id` field is always 1 immediately after this call.
    pub fn details(&mut self) -> PersonDetails {
        self.id = 1;
        PersonDetails {
            id: self.id,
            name: "Jill".to_string(),
            age: 20,
        }
    }
}
