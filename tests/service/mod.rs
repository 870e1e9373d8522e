mod launch;
mod rocket;
