// Carousel ideation chat: a thin pass-through to the chat-completion backend.

pub mod handlers;
