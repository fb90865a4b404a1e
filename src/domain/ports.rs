use super::client::{Client, ClientId};

/// Registry of clients keyed by government id.
///
/// Implementations keep registration order for iteration. Uniqueness of ids
/// is enforced by the caller.
pub trait ClientStore {
    fn insert(&mut self, client: Client);
    fn get(&self, id: &ClientId) -> Option<&Client>;
    fn get_mut(&mut self, id: &ClientId) -> Option<&mut Client>;
    fn clients(&self) -> Box<dyn Iterator<Item = &Client> + '_>;

    fn contains(&self, id: &ClientId) -> bool {
        self.get(id).is_some()
    }
}
