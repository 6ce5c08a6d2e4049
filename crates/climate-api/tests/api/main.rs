mod helpers;
mod sqlite_dataset;
