pub mod u001_volunteer_registration;
