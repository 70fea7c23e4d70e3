//! Contact message store operations.
//!
//! Messages are append-only: created by public submission, read by
//! admins, never updated or deleted.

use chrono::Utc;

use lilys_lawn_core::MessageId;

use super::Store;
use crate::models::{ContactMessage, NewContactMessage};

impl Store {
    /// Record a contact form submission.
    pub fn create_contact_message(&self, new: NewContactMessage) -> ContactMessage {
        let created_at = Utc::now();
        self.contact_messages_table().insert_with(|id| ContactMessage {
            id: MessageId::new(id),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            service: new.service.clone(),
            address: new.address.clone(),
            message: new.message.clone(),
            created_at,
        })
    }

    /// All contact messages, in insertion order.
    #[must_use]
    pub fn contact_messages(&self) -> Vec<ContactMessage> {
        self.contact_messages_table().all()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lilys_lawn_core::Email;

    use super::*;

    fn new_message(name: &str) -> NewContactMessage {
        NewContactMessage {
            name: name.to_owned(),
            email: Email::parse("customer@example.com").unwrap(),
            phone: "5095551234".to_owned(),
            service: "Lawn Mowing".to_owned(),
            address: None,
            message: "Please give me a quote.".to_owned(),
        }
    }

    #[test]
    fn test_create_preserves_fields_and_assigns_id() {
        let store = Store::new();
        let record = store.create_contact_message(new_message("Pat"));

        assert_eq!(record.id, MessageId::new(1));
        assert_eq!(record.name, "Pat");
        assert_eq!(record.email.as_str(), "customer@example.com");
        assert_eq!(record.address, None);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let store = Store::new();
        let first = store.create_contact_message(new_message("a"));
        let second = store.create_contact_message(new_message("b"));
        let third = store.create_contact_message(new_message("c"));

        assert!(first.id < second.id);
        assert!(second.id < third.id);
    }

    #[test]
    fn test_listing_is_insertion_ordered() {
        let store = Store::new();
        for name in ["first", "second", "third"] {
            store.create_contact_message(new_message(name));
        }

        let names: Vec<String> = store
            .contact_messages()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
