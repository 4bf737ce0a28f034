// Reel suggestions: the model proposes clip cuts for an uploaded video.
// Nothing is cut or rendered here; the video itself never leaves the server.

pub mod handlers;
pub mod models;
pub mod prompts;
