mod attributes;
mod fixed;
