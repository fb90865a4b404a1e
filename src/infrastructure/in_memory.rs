use crate::domain::client::{Client, ClientId};
use crate::domain::ports::ClientStore;
use std::collections::HashMap;

/// In-memory client registry.
///
/// Clients live in a `Vec` to preserve registration order, with a
/// `HashMap<ClientId, usize>` index for lookups.
#[derive(Default)]
pub struct InMemoryClientStore {
    clients: Vec<Client>,
    index: HashMap<ClientId, usize>,
}

impl InMemoryClientStore {
    /// Creates a new, empty in-memory client store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClientStore for InMemoryClientStore {
    fn insert(&mut self, client: Client) {
        match self.index.get(client.id()) {
            Some(&slot) => self.clients[slot] = client,
            None => {
                self.index.insert(client.id().clone(), self.clients.len());
                self.clients.push(client);
            }
        }
    }

    fn get(&self, id: &ClientId) -> Option<&Client> {
        self.index.get(id).map(|&slot| &self.clients[slot])
    }

    fn get_mut(&mut self, id: &ClientId) -> Option<&mut Client> {
        self.index.get(id).map(|&slot| &mut self.clients[slot])
    }

    fn clients(&self) -> Box<dyn Iterator<Item = &Client> + '_> {
        Box::new(self.clients.iter())
    }
}
