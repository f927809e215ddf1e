use wasm_bindgen::prelude::*;

mod game;
use game::SchedulerPrompt;

prompt_web::export_game!(SchedulerPrompt, "scheduler-prompt");
