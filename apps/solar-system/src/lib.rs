use wasm_bindgen::prelude::*;
use astra_engine::*;

mod bodies;
mod game;
mod orbit;
mod planet;
use game::SolarSystem;

astra_web::export_game!(SolarSystem, "solar-system");
