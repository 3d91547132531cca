mod usccb_http;

pub use usccb_http::UsccbHttpProvider;
