use wasm_bindgen::prelude::*;

mod game;
mod phrases;
use game::TicketPrompt;

prompt_web::export_game!(TicketPrompt, "ticket-prompt");
