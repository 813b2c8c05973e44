mod write_bad;
mod write_good;
