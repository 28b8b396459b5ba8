mod blood_pressure_reading;
mod weight_entry;
