mod dashboard;
mod detail;
