use std::collections::HashMap;

use back2me_types::api::{ConversationSummary, UserRef};
use back2me_types::models::{AccountId, ConversationId, Message};
use chrono::Utc;
use tracing::info;

use crate::{Store, StoreResult};

impl Store {
    // -- Messages --

    /// Append a message. Neither the conversation nor the participants are
    /// validated.
    pub fn send_message(
        &self,
        conversation_id: ConversationId,
        sender_id: AccountId,
        receiver_id: AccountId,
        body: &str,
    ) -> StoreResult<Message> {
        let message = self.write(|tables| {
            tables
                .messages
                .insert_with(|id| Message {
                    id,
                    conversation_id,
                    sender_id,
                    receiver_id,
                    message: body.to_string(),
                    created_at: Utc::now(),
                })
                .clone()
        })?;

        info!(
            "Message {} in conversation {} from {} to {}",
            message.id, conversation_id, sender_id, receiver_id
        );
        Ok(message)
    }

    pub fn get_messages(&self, conversation_id: ConversationId) -> StoreResult<Vec<Message>> {
        self.read(|tables| {
            tables
                .messages
                .iter()
                .filter(|m| m.conversation_id == conversation_id)
                .cloned()
                .collect()
        })
    }

    /// Every conversation `user_id` has sent or received a message in,
    /// ordered by first appearance. The other participant is taken from the
    /// latest message.
    pub fn conversations_for(&self, user_id: AccountId) -> StoreResult<Vec<ConversationSummary>> {
        self.read(|tables| {
            let mut order: Vec<ConversationId> = Vec::new();
            let mut grouped: HashMap<ConversationId, Vec<Message>> = HashMap::new();

            for msg in tables
                .messages
                .iter()
                .filter(|m| m.sender_id == user_id || m.receiver_id == user_id)
            {
                let bucket = grouped.entry(msg.conversation_id).or_insert_with(|| {
                    order.push(msg.conversation_id);
                    Vec::new()
                });
                bucket.push(msg.clone());
            }

            order
                .into_iter()
                .filter_map(|cid| {
                    let messages = grouped.remove(&cid)?;
                    let last = messages.last()?.clone();
                    let other_id = if last.sender_id == user_id {
                        last.receiver_id
                    } else {
                        last.sender_id
                    };
                    let other_user = tables
                        .accounts
                        .iter()
                        .find(|a| a.id == other_id)
                        .map(|a| UserRef {
                            id: a.id,
                            username: a.username.clone(),
                        });

                    Some(ConversationSummary {
                        conversation_id: cid,
                        other_user,
                        last_message: last.message,
                        last_message_time: last.created_at,
                        messages,
                    })
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_get_sequential_ids_without_validation() {
        let store = Store::default();
        let first = store.send_message(7, 100, 200, "hello").unwrap();
        let second = store.send_message(7, 200, 100, "hi").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.get_messages(7).unwrap().len(), 2);
        assert!(store.get_messages(8).unwrap().is_empty());
    }

    #[test]
    fn conversations_group_by_id_and_resolve_other_user() {
        let store = Store::default();
        let sarah = store.register("sarah_j", "sarah@campus.edu", "pw").unwrap();
        let michael = store.register("michael_c", "michael@campus.edu", "pw").unwrap();

        store.send_message(1, sarah, michael, "Is the iPhone still available?").unwrap();
        store.send_message(2, 99, sarah, "Found your keys").unwrap();
        store.send_message(1, michael, sarah, "Yes, I still have it.").unwrap();
        store.send_message(3, michael, 99, "unrelated").unwrap();

        let convs = store.conversations_for(sarah).unwrap();
        assert_eq!(convs.len(), 2);

        assert_eq!(convs[0].conversation_id, 1);
        assert_eq!(convs[0].messages.len(), 2);
        assert_eq!(convs[0].last_message, "Yes, I still have it.");
        assert_eq!(
            convs[0].other_user,
            Some(UserRef { id: michael, username: "michael_c".into() })
        );

        assert_eq!(convs[1].conversation_id, 2);
        assert!(convs[1].other_user.is_none());
    }
}
