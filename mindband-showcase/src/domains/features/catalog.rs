//! Built-in feature data for the MindBand watch faces.

/// Raw registry row; validated into a `FeatureRecord` at startup.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSeed {
    pub id: &'static str,
    pub icon: &'static str,
    pub colour: &'static str,
    pub descriptions: &'static [&'static str],
}

/// Watch faces in carousel order.
pub const WATCH_FACES: [&str; 7] = [
    "health-monitoring-and-fitness",
    "smart-home-control",
    "watch-control",
    "sleep-tracking",
    "battery-life",
    "mood-detection",
    "cellular-network",
];

pub const WATCH_FEATURES: [FeatureSeed; 7] = [
    FeatureSeed {
        id: "health-monitoring-and-fitness",
        icon: "fa-person-running",
        colour: "#FF5D6D",
        descriptions: &[
            "MindBand tracks key health metrics like heart rate, activity levels, and blood pressure. \
             It provides real-time updates to help you stay aware of your body’s performance. Receive insights \
             on your fitness trends and get notified if irregular patterns are detected. \
             Whether you’re exercising or relaxing, MindBand helps you prioritise your well-being.",
        ],
    },
    FeatureSeed {
        id: "smart-home-control",
        icon: "fa-lightbulb",
        colour: "#d58dff",
        descriptions: &[
            "Easily control your smart home devices with just a thought. MindBand connects to compatible devices \
             like lights, thermostats, and speakers for seamless operation. Forget voice commands or apps — just think \
             of the action, and MindBand will do the rest. Adjust the temperature or switch off the lights without \
             lifting a finger.",
        ],
    },
    FeatureSeed {
        id: "watch-control",
        icon: "fa-gears",
        colour: "#FFD862",
        descriptions: &[
            "Control your smartwatch functions with just a thought. Open notifications, set alarms, or send messages \
             without tapping or swiping. MindBand recognises your brainwave patterns and responds instantly, making smartwatch \
             navigation more intuitive than ever.",
        ],
    },
    FeatureSeed {
        id: "sleep-tracking",
        icon: "fa-moon",
        colour: "#a175ff",
        descriptions: &[
            "The MindBand Smartwatch utilises EEG sensors to track brainwave activity in real time, offering a deeper \
             understanding of sleep patterns. Unlike traditional wearables that rely on movement or heart rate, MindBand \
             directly monitors brain activity, detecting transitions between light sleep, deep sleep, and REM sleep with \
             high accuracy. Wake up to detailed insights and personalised recommendations. With better sleep awareness, \
             you can improve your nightly rest over time.",
        ],
    },
    FeatureSeed {
        id: "battery-life",
        icon: "fa-battery-half",
        colour: "#2FA931",
        descriptions: &[
            "Enjoy extended use with MindBand’s long-lasting battery. It provides 48 hours of performance on a single charge \
             whether you're tracking workouts or controlling devices. No need to worry about frequent charging - MindBand is \
             designed to support your busy lifestyle with reliable, efficient power.",
        ],
    },
    FeatureSeed {
        id: "mood-detection",
        icon: "fa-face-smile",
        colour: "#B6A3CE",
        descriptions: &[
            "MindBand detects subtle changes in your mood by analysing neural signals. It helps you track emotional patterns \
             throughout the day. The MindBand Smartwatch detects mood by analysing brainwave activity, heart rate variability (HRV), \
             and skin conductivity. Its EEG sensors track brain signals associated with emotions, distinguishing patterns linked to stress, \
             relaxation, or focus. Combined with HRV data, it identifies physiological responses to emotions like anxiety or calmness. \
             By understanding these trends, you can make adjustments to better manage stress and improve your mental well-being.",
        ],
    },
    FeatureSeed {
        id: "cellular-network",
        icon: "fa-tower-broadcast",
        colour: "#FFB200",
        descriptions: &[
            "Stay connected wherever you go. MindBand supports cellular connectivity, allowing you to send messages, \
             make calls, and receive notifications. Even without your phone nearby, you’ll stay in touch with what matters \
             most. MindBand ensures you’re always connected and informed.",
        ],
    },
];
