//! Word lists the faker draws from.

pub const FIRST_NAMES: &[&str] = &[
    "Alejandro", "Ana", "Carlos", "Carmen", "Daniel", "Diana", "Eduardo", "Elena", "Fernando",
    "Gabriela", "Hector", "Isabel", "Javier", "Julia", "Luis", "Laura", "Manuel", "Maria",
    "Miguel", "Natalia", "Oscar", "Patricia", "Pedro", "Rosa", "Roberto", "Sofia", "Tomas",
    "Valeria", "James", "Mary", "John", "Linda", "Michael", "Sarah", "David", "Emma",
];

pub const LAST_NAMES: &[&str] = &[
    "Garcia", "Martinez", "Lopez", "Hernandez", "Gonzalez", "Perez", "Rodriguez", "Sanchez",
    "Ramirez", "Torres", "Flores", "Rivera", "Gomez", "Diaz", "Cruz", "Morales", "Reyes",
    "Ortiz", "Villarejo", "Smith", "Johnson", "Williams", "Brown", "Jones", "Miller", "Davis",
    "Wilson", "Anderson", "Taylor", "Thomas",
];

pub const STREET_NAMES: &[&str] = &[
    "Juarez", "Hidalgo", "Morelos", "Reforma", "Insurgentes", "Madero", "Zaragoza", "Allende",
    "Oak", "Maple", "Pine", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park", "Main",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Boulevard", "Road", "Lane", "Drive", "Court", "Way",
];

pub const CITIES: &[&str] = &[
    "Mexico City", "Guadalajara", "Monterrey", "Puebla", "Merida", "Oaxaca", "Zacatecas",
    "Madrid", "Bogota", "Lima", "Santiago", "Buenos Aires", "New York", "Chicago", "Toronto",
    "London", "Paris", "Berlin", "Tokyo", "Sydney",
];

pub const COUNTRIES: &[&str] = &[
    "Mexico", "Spain", "Colombia", "Peru", "Chile", "Argentina", "United States", "Canada",
    "United Kingdom", "France", "Germany", "Italy", "Japan", "Australia", "Brazil", "India",
];

pub const COMPANY_PREFIXES: &[&str] = &[
    "Acme", "Globex", "Initech", "Umbrella", "Stark", "Wayne", "Soylent", "Hooli", "Vandelay",
    "Tyrell", "Cyberdyne", "Aperture",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Group", "Corp", "Ltd", "S.A. de C.V.", "Holdings", "Labs",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "mail.test", "correo.test",
];

pub const WORDS: &[&str] = &[
    "alpha", "bravo", "data", "pool", "river", "stone", "cloud", "signal", "matrix", "orbit",
    "vector", "harbor", "lantern", "meadow", "ember", "quartz", "summit", "canyon", "pixel",
    "ledger", "beacon", "willow", "falcon", "cipher", "delta", "echo", "fable", "garnet",
];
