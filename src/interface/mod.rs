pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_menu_csv;
pub use prompts::{
    fuzzy_candidates, prompt_add_ins, prompt_base_drink, prompt_yes_no, suggest_names,
};
pub use render::{
    display_add_ins, display_budget, display_menu, display_summary, display_sustainability,
    display_totals, drink_icon, money,
};
