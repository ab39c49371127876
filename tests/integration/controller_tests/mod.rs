mod plugin;
mod scenarios;
