mod programs;
mod properties;
