mod api;
mod form;
