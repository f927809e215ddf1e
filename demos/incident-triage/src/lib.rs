use wasm_bindgen::prelude::*;

mod game;
use game::IncidentTriage;

prompt_web::export_game!(IncidentTriage, "incident-triage");
