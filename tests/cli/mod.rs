mod clean;
mod generate;
mod url;
