pub mod db;
pub mod item {
    pub mod columns;
    pub mod entity;
    pub mod repository;
}
