use back2me_types::models::{Account, Message, Post};

/// An append-only collection with its own id counter. Ids start at 1 and
/// are assigned in the same step as the push, under the store's write lock.
pub(crate) struct Collection<T> {
    rows: Vec<T>,
    next_id: u64,
}

impl<T> Collection<T> {
    pub(crate) fn new() -> Self {
        Self { rows: Vec::new(), next_id: 1 }
    }

    pub(crate) fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(build(id));
        &self.rows[self.rows.len() - 1]
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

pub(crate) struct Tables {
    pub(crate) accounts: Collection<Account>,
    pub(crate) posts: Collection<Post>,
    pub(crate) messages: Collection<Message>,
}

impl Tables {
    pub(crate) fn new() -> Self {
        Self {
            accounts: Collection::new(),
            posts: Collection::new(),
            messages: Collection::new(),
        }
    }
}
