mod badge;
mod club;
mod user_input;
