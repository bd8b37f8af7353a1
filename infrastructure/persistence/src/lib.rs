pub mod db;
pub mod product {
    pub mod entity;
    pub mod in_memory;
    pub mod repository;
}
