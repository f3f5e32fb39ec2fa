mod forms;
mod session_state;
mod user_record;
