pub mod day_6;
