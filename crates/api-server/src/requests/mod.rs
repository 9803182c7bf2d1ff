mod chat;

pub use chat::ChatBody;
