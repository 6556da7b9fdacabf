pub use super::classroom::Entity as Classroom;
