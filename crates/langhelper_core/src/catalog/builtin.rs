//! Compiled-in landmark tables.
//!
//! Table order is significant: every scan in the resolver breaks ties by the
//! first entry in these slices.

use crate::model::landmark::{AliasEntry, LandmarkRecord, SecondaryIndexEntry};

struct BuiltinLandmark {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    secondary_name: &'static str,
    fact: Option<&'static str>,
}

const LANDMARKS: &[BuiltinLandmark] = &[
    // Russia
    BuiltinLandmark {
        key: "красная площадь",
        name: "Красная площадь",
        description: "Москва, Россия - главная площадь страны",
        secondary_name: "Red Square",
        fact: Some("Интересный факт: Изначально называлась \"Торг\", а современное название получила в 17 веке"),
    },
    BuiltinLandmark {
        key: "кремль",
        name: "Кремль",
        description: "Москва, историческая крепость",
        secondary_name: "Kremlin",
        fact: Some("Интересный факт: В Кремле 20 башен, каждая имеет свое название и историю"),
    },
    BuiltinLandmark {
        key: "эрмитаж",
        name: "Эрмитаж",
        description: "Санкт-Петербург, музей искусств",
        secondary_name: "Hermitage Museum",
        fact: Some("Интересный факт: Чтобы обойти все экспозиции, потребуется пройти 24 км"),
    },
    BuiltinLandmark {
        key: "петергоф",
        name: "Петергоф",
        description: "Санкт-Петербург, дворцово-парковый ансамбль",
        secondary_name: "Peterhof Palace",
        fact: Some("Интересный факт: Имеет 176 фонтанов и 4 каскада"),
    },
    BuiltinLandmark {
        key: "собор василия блаженного",
        name: "Собор Василия Блаженного",
        description: "Москва, православный храм на Красной площади",
        secondary_name: "Saint Basil's Cathedral",
        fact: Some("Интересный факт: Построен в 1555-1561 годах по приказу Ивана Грозного"),
    },
    BuiltinLandmark {
        key: "мавзолей ленина",
        name: "Мавзолей Ленина",
        description: "Москва, усыпальница на Красной площади",
        secondary_name: "Lenin's Mausoleum",
        fact: None,
    },
    BuiltinLandmark {
        key: "третьяковская галерея",
        name: "Третьяковская галерея",
        description: "Москва, музей русского искусства",
        secondary_name: "Tretyakov Gallery",
        fact: Some("Интересный факт: Основана в 1856 году купцом Павлом Третьяковым"),
    },
    BuiltinLandmark {
        key: "большой театр",
        name: "Большой театр",
        description: "Москва, театр оперы и балета",
        secondary_name: "Bolshoi Theatre",
        fact: Some("Интересный факт: Открыт в 1825 году, пострадал от нескольких пожаров"),
    },
    // Europe and the rest of the world
    BuiltinLandmark {
        key: "эйфелева башня",
        name: "Эйфелева башня",
        description: "Париж, Франция - металлическая башня",
        secondary_name: "Eiffel Tower",
        fact: Some("Интересный факт: Построена за 2 года и 2 месяца, изначально планировалась как временное сооружение"),
    },
    BuiltinLandmark {
        key: "лувр",
        name: "Лувр",
        description: "Париж, Франция - художественный музей",
        secondary_name: "Louvre Museum",
        fact: Some("Интересный факт: Самый посещаемый музей в мире, открыт в 1793 году"),
    },
    BuiltinLandmark {
        key: "колизей",
        name: "Колизей",
        description: "Рим, Италия - амфитеатр",
        secondary_name: "Colosseum",
        fact: Some("Интересный факт: Вмещал до 50 000 зрителей, имел раздвижную крышу"),
    },
    BuiltinLandmark {
        key: "биг бен",
        name: "Биг-Бен",
        description: "Лондон, Великобритания - часовая башня",
        secondary_name: "Big Ben",
        fact: Some("Интересный факт: Название относится не к башне, а к 13-тонному колоколу внутри"),
    },
    BuiltinLandmark {
        key: "статуя свободы",
        name: "Статуя Свободы",
        description: "Нью-Йорк, США - символ свободы",
        secondary_name: "Statue of Liberty",
        fact: Some("Интересный факт: Подарок Франции США к 100-летию независимости"),
    },
    BuiltinLandmark {
        key: "великая китайская стена",
        name: "Великая Китайская стена",
        description: "Китай - оборонительное сооружение",
        secondary_name: "Great Wall of China",
        fact: Some("Интересный факт: Ее длина составляет около 21 196 км"),
    },
    BuiltinLandmark {
        key: "тадж махал",
        name: "Тадж-Махал",
        description: "Индия - мавзолей-мечеть",
        secondary_name: "Taj Mahal",
        fact: Some("Интересный факт: Строился 22 года, для его отделки использовались полудрагоценные камни"),
    },
    // Asia
    BuiltinLandmark {
        key: "фудзияма",
        name: "Фудзияма",
        description: "Япония - вулкан и священная гора",
        secondary_name: "Mount Fuji",
        fact: Some("Интересный факт: Активный вулкан, последнее извержение было в 1707 году"),
    },
    BuiltinLandmark {
        key: "ангкор ват",
        name: "Ангкор-Ват",
        description: "Камбоджа - храмовый комплекс",
        secondary_name: "Angkor Wat",
        fact: Some("Интересный факт: Крупнейший религиозный памятник в мире"),
    },
    // Categories emitted by the image classifier
    BuiltinLandmark {
        key: "архитектурный объект",
        name: "Архитектурный объект",
        description: "Обнаруженный архитектурный объект",
        secondary_name: "Architectural Object",
        fact: Some("Интересный факт: Обнаружено нейросетью с использованием компьютерного зрения"),
    },
    BuiltinLandmark {
        key: "замок",
        name: "Замок",
        description: "Историческое оборонительное сооружение",
        secondary_name: "Castle",
        fact: Some("Интересный факт: Замки строились для защиты от нападений, часто на холмах"),
    },
    BuiltinLandmark {
        key: "церковь",
        name: "Церковь",
        description: "Религиозное сооружение",
        secondary_name: "Church",
        fact: Some("Интересный факт: Архитектура церквей часто символична и отражает религиозные традиции"),
    },
    BuiltinLandmark {
        key: "мечеть",
        name: "Мечеть",
        description: "Мусульманское молитвенное сооружение",
        secondary_name: "Mosque",
        fact: Some("Интересный факт: Мечети часто ориентированы в сторону Мекки (кибла)"),
    },
    BuiltinLandmark {
        key: "дворец",
        name: "Дворец",
        description: "Парадное здание для знати",
        secondary_name: "Palace",
        fact: Some("Интересный факт: Дворцы демонстрировали богатство и власть их владельцев"),
    },
    BuiltinLandmark {
        key: "мост",
        name: "Мост",
        description: "Инженерное сооружение для преодоления препятствий",
        secondary_name: "Bridge",
        fact: Some("Интересный факт: Мосты существуют с древних времен для преодоления водных преград"),
    },
    BuiltinLandmark {
        key: "небоскрёб",
        name: "Небоскрёб",
        description: "Высотное здание",
        secondary_name: "Skyscraper",
        fact: Some("Интересный факт: Первым небоскребом считается Home Insurance Building в Чикаго (1885)"),
    },
    BuiltinLandmark {
        key: "музей",
        name: "Музей",
        description: "Учреждение для хранения и показа экспонатов",
        secondary_name: "Museum",
        fact: Some("Интересный факт: Слово \"музей\" происходит от греческого \"мусейон\" - храм муз"),
    },
    BuiltinLandmark {
        key: "стадион",
        name: "Стадион",
        description: "Спортивное сооружение",
        secondary_name: "Stadium",
        fact: Some("Интересный факт: Самый большой стадион в мире - Стадион Первого мая в Пхеньяне (150 000 мест)"),
    },
    BuiltinLandmark {
        key: "башня",
        name: "Башня",
        description: "Высокое сооружение",
        secondary_name: "Tower",
        fact: Some("Интересный факт: Башни строили для обзора местности, связи или как символы"),
    },
];

const ALIASES: &[(&str, &str)] = &[
    ("московский кремль", "кремль"),
    ("кремль в москве", "кремль"),
    ("the kremlin", "кремль"),
    ("парижская башня", "эйфелева башня"),
    ("eiffel", "эйфелева башня"),
    ("лондонская башня", "биг бен"),
    ("лондонский биг бен", "биг бен"),
    ("bigben", "биг бен"),
    ("великая стена", "великая китайская стена"),
    ("great wall", "великая китайская стена"),
    ("тадж", "тадж махал"),
    ("taj", "тадж махал"),
    ("гора фудзи", "фудзияма"),
    ("fuji", "фудзияма"),
    ("ангкор", "ангкор ват"),
];

const SECONDARY_INDEX: &[(&str, &str)] = &[
    ("eiffel tower", "эйфелева башня"),
    ("red square", "красная площадь"),
    ("big ben", "биг бен"),
    ("statue of liberty", "статуя свободы"),
    ("colosseum", "колизей"),
    ("kremlin", "кремль"),
    ("taj mahal", "тадж махал"),
    ("great wall of china", "великая китайская стена"),
    ("mount fuji", "фудзияма"),
    ("angkor wat", "ангкор ват"),
    ("louvre", "лувр"),
    ("hermitage", "эрмитаж"),
    ("saint basil's cathedral", "собор василия блаженного"),
    ("peterhof", "петергоф"),
    ("castle", "замок"),
    ("church", "церковь"),
    ("mosque", "мечеть"),
    ("palace", "дворец"),
    ("bridge", "мост"),
    ("skyscraper", "небоскрёб"),
    ("museum", "музей"),
    ("stadium", "стадион"),
    ("tower", "башня"),
];

pub(crate) fn landmark_records() -> Vec<LandmarkRecord> {
    LANDMARKS
        .iter()
        .map(|landmark| LandmarkRecord {
            canonical_key: landmark.key.to_string(),
            display_name: landmark.name.to_string(),
            description: landmark.description.to_string(),
            secondary_name: landmark.secondary_name.to_string(),
            fact: landmark.fact.map(str::to_string),
        })
        .collect()
}

pub(crate) fn alias_entries() -> Vec<AliasEntry> {
    ALIASES
        .iter()
        .map(|&(phrase, canonical_key)| AliasEntry {
            phrase: phrase.to_string(),
            canonical_key: canonical_key.to_string(),
        })
        .collect()
}

pub(crate) fn secondary_entries() -> Vec<SecondaryIndexEntry> {
    SECONDARY_INDEX
        .iter()
        .map(|&(key, canonical_key)| SecondaryIndexEntry {
            key: key.to_string(),
            canonical_key: canonical_key.to_string(),
        })
        .collect()
}
