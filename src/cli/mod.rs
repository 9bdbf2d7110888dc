pub mod dispatcher;
pub mod main_types;
pub mod work_code_handler;
