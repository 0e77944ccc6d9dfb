pub mod shared {
    pub mod infrastructure {
        pub mod read_cache;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod patch;
            pub mod ports;
            pub mod search;
            pub mod view;
        }
        pub mod application {
            pub mod errors;
            pub mod snapshot_cache;
        }
        pub mod use_cases {
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod search_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod error_response;
            }
            pub mod outbound {
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
