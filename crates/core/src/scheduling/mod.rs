pub mod calendar;
pub mod overlap;
pub mod reconcile;
pub mod validator;
