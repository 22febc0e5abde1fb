pub mod preference;
