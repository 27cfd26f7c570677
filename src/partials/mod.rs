pub(crate) mod events;
pub(crate) mod head;
pub(crate) mod header;
pub(crate) mod layout;
