pub mod files;
pub mod annotation {
    pub mod repository;
}
pub mod inspection {
    pub mod repository;
}
pub mod rule {
    pub mod repository;
}
pub mod web {
    pub mod repository;
}
