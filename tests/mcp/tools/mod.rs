mod config;
mod inspect;
mod translate;
