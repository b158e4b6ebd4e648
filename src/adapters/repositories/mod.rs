mod customer;
mod loan;
mod movie;
mod topic;

pub use customer::HttpCustomerRepository;
pub use loan::HttpLoanRepository;
pub use movie::HttpMovieRepository;
pub use topic::HttpTopicRepository;
