pub mod event_mapper;

pub use event_mapper::EventMapper;
