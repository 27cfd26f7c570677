pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod donations;
pub(crate) mod index;
pub(crate) mod ministries;
pub(crate) mod sermons;
