pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod image {
    pub mod routes;
}
pub mod item {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
