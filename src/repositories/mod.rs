pub mod lead_repository;

pub use lead_repository::{LeadRepository, MongoLeadRepository};

#[cfg(test)]
pub use lead_repository::MockLeadRepository;
