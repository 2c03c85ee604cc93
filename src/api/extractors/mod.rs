pub mod booking_form;
