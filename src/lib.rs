pub mod configuration;

pub mod error;

pub mod report {
    pub mod reportwindow;
    pub mod reportrun;
}

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod offsetholiday;
        pub mod holidayrule;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod businessdaycalendar;
        pub mod businessdayresolver;
    }
}
