//! Curated Spanish fallback pools for every content kind. These are the
//! offline decks the selector deals from whenever no text provider is
//! configured or a request comes back unusable.

use crate::types::NeverMode;

pub fn words(category_id: &str) -> &'static [&'static str] {
    match category_id {
        "famous" => FAMOUS,
        "movies" => MOVIES,
        "tv" => TV,
        "sports" => SPORTS,
        "food" => FOOD,
        "places" => PLACES,
        "animals" => ANIMALS,
        "music" => MUSIC,
        "history" => HISTORY,
        // "general" draws from the structured list instead; anything
        // unknown degrades to the famous deck rather than panicking.
        _ => FAMOUS,
    }
}

pub fn pairs(category_id: &str) -> &'static [(&'static str, &'static str)] {
    match category_id {
        "general" => PAIRS_GENERAL,
        "animals" => PAIRS_ANIMALS,
        "food" => PAIRS_FOOD,
        "sports" => PAIRS_SPORTS,
        _ => PAIRS_DEFAULT,
    }
}

pub fn never_phrases(mode: NeverMode) -> &'static [&'static str] {
    match mode {
        NeverMode::Soft => NEVER_SOFT,
        NeverMode::Party => NEVER_PARTY,
        NeverMode::Spicy => NEVER_SPICY,
    }
}

const FAMOUS: &[&str] = &[
    "Elon Musk",
    "Einstein",
    "Shakira",
    "Messi",
    "Cristiano Ronaldo",
    "Donald Trump",
    "Will Smith",
    "Taylor Swift",
    "Picasso",
    "Cleopatra",
    "Marilyn Monroe",
    "Michael Jackson",
    "Beyoncé",
    "Zendaya",
    "Tom Holland",
    "Leonardo DiCaprio",
    "Frida Kahlo",
    "Bad Bunny",
    "Rosalía",
    "Ibai Llanos",
    "Kim Kardashian",
    "Brad Pitt",
    "Angelina Jolie",
    "Freddie Mercury",
    "Elvis Presley",
    "Gordon Ramsay",
    "Steve Jobs",
    "Mark Zuckerberg",
    "Putin",
    "Barack Obama",
    "Reina Isabel II",
    "Lady Gaga",
    "Rihanna",
    "Tom Cruise",
    "Johnny Depp",
    "Jennifer Lawrence",
];

const MOVIES: &[&str] = &[
    "Harry Potter",
    "Darth Vader",
    "Joker",
    "Spider-Man",
    "Titanic",
    "Avatar",
    "Shrek",
    "Batman",
    "Toy Story",
    "Matrix",
    "El Padrino",
    "Star Wars",
    "Jurassic Park",
    "Frozen",
    "Los Vengadores",
    "Barbie",
    "Oppenheimer",
    "Coco",
    "El Rey León",
    "Buscando a Nemo",
    "Piratas del Caribe",
    "Indiana Jones",
    "Volver al Futuro",
    "Pulp Fiction",
    "El Señor de los Anillos",
    "Forrest Gump",
    "Gladiator",
    "Iron Man",
    "Thor",
    "La Sirenita",
];

const TV: &[&str] = &[
    "Los Simpson",
    "Juego de Tronos",
    "Stranger Things",
    "La Casa de Papel",
    "Bob Esponja",
    "Friends",
    "Breaking Bad",
    "MasterChef",
    "El Juego del Calamar",
    "Black Mirror",
    "The Office",
    "Rick y Morty",
    "La que se avecina",
    "Aquí no hay quien viva",
    "El Hormiguero",
    "Padre de Familia",
    "South Park",
    "Futurama",
    "Pasapalabra",
    "La Isla de las Tentaciones",
    "Gran Hermano",
    "Operación Triunfo",
    "Peaky Blinders",
    "The Crown",
    "Narcos",
    "Gossip Girl",
    "Anatomía de Grey",
    "Vikingos",
    "The Mandalorian",
];

const SPORTS: &[&str] = &[
    "Fútbol",
    "Baloncesto",
    "Tenis",
    "Natación",
    "Michael Jordan",
    "Nadal",
    "Estadio",
    "Pelota de Golf",
    "Fórmula 1",
    "Boxeo",
    "Karate",
    "Surf",
    "Voleibol",
    "Escalada",
    "Ciclismo",
    "Fernando Alonso",
    "Serena Williams",
    "LeBron James",
    "Tiger Woods",
    "Usain Bolt",
    "Maradona",
    "Pelé",
    "Copa del Mundo",
    "Juegos Olímpicos",
    "Gym",
    "Crossfit",
    "Padel",
    "Rugby",
    "Beisbol",
    "Skate",
    "Snowboard",
];

const FOOD: &[&str] = &[
    "Pizza con piña",
    "Sushi",
    "Paella",
    "Tacos",
    "Hamburguesa",
    "Helado",
    "Chocolate",
    "Brocoli",
    "Espaguetis",
    "Ceviche",
    "Cruasán",
    "Tortilla de patatas",
    "Burrito",
    "Ramen",
    "Donut",
    "Aguacate",
    "Queso azul",
    "Jamón Serrano",
    "Churros",
    "Gazpacho",
    "Arepa",
    "Empanada",
    "Curry",
    "Kebab",
    "Ensalada César",
    "Tiramisú",
    "Cheesecake",
    "Palomitas",
    "Salchicha",
    "Huevo frito",
    "Bacon",
    "Café",
    "Croqueta",
    "Lasaña",
];

const PLACES: &[&str] = &[
    "Torre Eiffel",
    "Muralla China",
    "Machu Picchu",
    "Egipto",
    "Nueva York",
    "Antártida",
    "El Coliseo",
    "Amazonas",
    "Disneyland",
    "Triángulo de las Bermudas",
    "Monte Everest",
    "Gran Cañón",
    "Taj Mahal",
    "Las Vegas",
    "Chernobyl",
    "Hollywood",
    "Tokio",
    "Londres",
    "Dubai",
    "Hawai",
    "Bali",
    "Roma",
    "París",
    "Polo Norte",
    "Desierto del Sahara",
    "Area 51",
    "La Luna",
    "Marte",
    "Castillo de Drácula",
    "Hogwarts",
];

const ANIMALS: &[&str] = &[
    "Ornitorrinco",
    "Dragón de Komodo",
    "Ajolote",
    "Pingüino",
    "Jirafa",
    "Elefante",
    "Perezoso",
    "Tiburón",
    "Canguro",
    "Koala",
    "Panda",
    "Camaleón",
    "Narval",
    "Capibara",
    "Nutria",
    "Suricata",
    "Llama",
    "Tigre",
    "León",
    "Gorila",
    "Delfín",
    "Ballena Azul",
    "Águila",
    "Búho",
    "Murciélago",
    "Cocodrilo",
    "Serpiente",
    "Rana",
    "Pulpo",
    "Medusa",
    "Caballo de mar",
    "Hámster",
    "Mapache",
    "Zorro",
];

const MUSIC: &[&str] = &[
    "Guitarra Eléctrica",
    "Bad Bunny",
    "Beethoven",
    "Freddie Mercury",
    "Piano",
    "Batería",
    "Micrófono",
    "Violín",
    "Reggaeton",
    "Rosalía",
    "The Beatles",
    "K-Pop",
    "BTS",
    "Saxofón",
    "DJ",
    "Opera",
    "Autotune",
    "Shakira",
    "Madonna",
    "Eminem",
    "Tupac",
    "Mozart",
    "Trompeta",
    "Flauta",
    "Concierto",
    "Festival",
    "Spotify",
    "Vinilo",
    "Auriculares",
    "Karol G",
    "Daddy Yankee",
];

const HISTORY: &[&str] = &[
    "Segunda Guerra Mundial",
    "Imperio Romano",
    "Napoleón",
    "Descubrimiento de América",
    "Revolución Francesa",
    "Vikingos",
    "Pirámides",
    "Samurái",
    "Titanic",
    "Aterrizaje en la Luna",
    "Muro de Berlín",
    "Peste Negra",
    "Gladiador",
    "Reina Victoria",
    "Cristóbal Colón",
    "Julio César",
    "Cleopatra",
    "Guerra Civil",
    "Hitler",
    "Churchill",
    "La Inquisición",
    "Edad Media",
    "Cavernícola",
    "Dinosaurios",
    "Revolución Industrial",
    "Guerra Fría",
];

/// General-category words carry a sub-category clue for the impostor hint.
pub const GENERAL_STRUCTURED: &[(&str, &str)] = &[
    ("Reloj de arena", "Medición de tiempo"),
    ("Máquina del tiempo", "Ciencia Ficción"),
    ("Dron", "Tecnología"),
    ("Holograma", "Tecnología"),
    ("Robot", "Tecnología"),
    ("Imán", "Física"),
    ("Brújula", "Navegación"),
    ("Telescopio", "Astronomía"),
    ("Mochila propulsora", "Transporte Aéreo"),
    ("Lámpara mágica", "Fantasía"),
    ("Espejo", "Objeto de Hogar"),
    ("Caja fuerte", "Seguridad"),
    ("Paraguas", "Accesorio"),
    ("Prismáticos", "Óptica"),
    ("Mapa del tesoro", "Aventura"),
    ("Caleidoscopio", "Juguete Óptico"),
    ("Bumerán", "Deporte/Juguete"),
    ("Walkie-talkie", "Comunicación"),
    ("Submarino", "Vehículo Acuático"),
    ("Cuchara", "Cubierto"),
    ("Microondas", "Electrodoméstico"),
    ("Silla", "Mueble"),
    ("Gafas de sol", "Accesorio"),
    ("Semáforo", "Tráfico"),
    ("Extintor", "Seguridad"),
    ("Espada láser", "Ficción"),
    ("Alfombra voladora", "Fantasía"),
    ("Bola de cristal", "Adivinación"),
    ("Detector de metales", "Herramienta"),
    ("Tijeras", "Herramienta"),
    ("Cepillo de dientes", "Higiene"),
    ("Monopatín", "Transporte"),
    ("Satélite", "Espacio"),
    ("Momia", "Historia"),
    ("Vampiro", "Monstruo"),
    ("Unicornio", "Mitología"),
    ("Sirena", "Mitología"),
];

const PAIRS_GENERAL: &[(&str, &str)] = &[
    ("Avión", "Helicóptero"),
    ("Cuchara", "Tenedor"),
    ("Zapato", "Calcetín"),
    ("Luna", "Sol"),
    ("Llave", "Candado"),
    ("Silla", "Sofá"),
    ("Gafas", "Lupa"),
    ("Mesa", "Escritorio"),
    ("Bolígrafo", "Lápiz"),
    ("Coche", "Moto"),
    ("Reloj", "Pulsera"),
    ("Libro", "Revista"),
    ("Ordenador", "Tablet"),
    ("Vaso", "Taza"),
    ("Puerta", "Ventana"),
    ("Cama", "Hamaca"),
];

const PAIRS_ANIMALS: &[(&str, &str)] = &[
    ("León", "Tigre"),
    ("Águila", "Halcón"),
    ("Tiburón", "Ballena"),
    ("Perro", "Lobo"),
    ("Caballo", "Burro"),
    ("Lobo", "Zorro"),
    ("Mariposa", "Abeja"),
    ("Gato", "Pantera"),
    ("Elefante", "Rinoceronte"),
    ("Oso", "Panda"),
];

const PAIRS_FOOD: &[(&str, &str)] = &[
    ("Pizza", "Pasta"),
    ("Manzana", "Pera"),
    ("Agua", "Refresco"),
    ("Pastel", "Galleta"),
    ("Sal", "Pimienta"),
    ("Café", "Chocolate"),
    ("Limón", "Lima"),
    ("Pan", "Tostada"),
    ("Arroz", "Cuscús"),
    ("Pollo", "Pavo"),
];

const PAIRS_SPORTS: &[(&str, &str)] = &[
    ("Fútbol", "Fútbol Sala"),
    ("Tenis", "Padel"),
    ("Natación", "Waterpolo"),
    ("Esquí", "Snowboard"),
    ("Golf", "Minigolf"),
    ("Baloncesto", "Voleibol"),
    ("Rugby", "Fútbol Americano"),
];

const PAIRS_DEFAULT: &[(&str, &str)] = &[
    ("Sol", "Luna"),
    ("Libro", "Cuaderno"),
    ("Coche", "Camión"),
    ("Reloj", "Cronómetro"),
];

const NEVER_SOFT: &[&str] = &[
    "Yo nunca he fingido estar enfermo.",
    "Yo nunca he buscado mi nombre en Google.",
    "Yo nunca he olvidado a qué iba a la cocina.",
];

const NEVER_PARTY: &[&str] = &[
    "Yo nunca he besado a alguien en este grupo.",
    "Yo nunca he vomitado por beber.",
    "Yo nunca me he colado en una fiesta.",
];

const NEVER_SPICY: &[&str] = &[
    "Yo nunca he hecho un trío.",
    "Yo nunca he mandado nudes.",
    "Yo nunca he tenido sexo en público.",
];

pub const MOST_LIKELY: &[&str] = &[
    "¿Quién es más probable que sobreviva a un apocalipsis zombie?",
    "¿Quién es más probable que se haga famoso por accidente?",
    "¿Quién es más probable que acabe en la cárcel?",
    "¿Quién es más probable que se case primero?",
    "¿Quién es más probable que llore en una película?",
    "¿Quién es más probable que olvide el cumpleaños de su pareja?",
    "¿Quién es más probable que se gaste todo el sueldo en un día?",
    "¿Quién es más probable que tropiece en una alfombra roja?",
    "¿Quién es más probable que tenga más hijos?",
    "¿Quién es más probable que se mude a otro país?",
];

pub const BOMB_CATEGORIES: &[&str] = &[
    "Marcas de ropa",
    "Nombres de países",
    "Animales mamíferos",
    "Comidas con A",
    "Objetos de oficina",
    "Deportes olímpicos",
    "Frutas",
    "Partes del cuerpo",
    "Marcas de coches",
    "Nombres de ciudades",
    "Instrumentos musicales",
    "Verbos en infinitivo",
    "Cosas que flotan",
    "Cosas de color rojo",
    "Palabras en inglés",
    "Nombres de mujer",
    "Cosas que se enchufan",
    "Superhéroes",
    "Villanos",
    "Sabores de helado",
];

pub const CONFESSION_PROMPTS: &[&str] = &[
    "Mi mayor miedo irracional",
    "Lo más ilegal que he hecho",
    "Mi gusto culposo (guilty pleasure)",
    "Lo más vergonzoso que me ha pasado",
    "Algo que odio y todo el mundo ama",
    "Mi peor cita romántica",
    "Una mentira que dije y nunca confesé",
    "El lugar más raro donde me he dormido",
    "Lo más caro que he roto",
    "Mi sueño frustrado",
    "Algo que robaría si fuera invisible",
    "La comida más rara que he probado",
    "Mi celebrity crush secreto",
    "Lo que haría con 1 millón de euros",
    "Mi hábito más asqueroso",
];

pub const THREE_IN_FIVE: &[&str] = &[
    "3 Marcas de coches",
    "3 Cosas que encuentras en un baño",
    "3 Animales que vuelan",
    "3 Nombres de mujer con M",
    "3 Ingredientes de pizza",
    "3 Superhéroes",
    "3 Capitales de Europa",
    "3 Cosas rojas",
    "3 Deportes de equipo",
    "3 Frutas amarillas",
    "3 Villanos de Disney",
    "3 Cosas que explotan",
    "3 Marcas de chocolate",
    "3 Cosas que flotan",
    "3 Partes del cuerpo",
    "3 Objetos de madera",
    "3 Cosas que huelen mal",
    "3 Nombres de perro",
    "3 Países de Asia",
    "3 Cosas que llevas a la playa",
];

pub const WOULD_YOU_RATHER: &[&str] = &[
    "¿Perder una mano o perder un pie?",
    "¿Saber cómo vas a morir o cuándo vas a morir?",
    "¿Vivir sin internet o vivir sin música?",
    "¿Ser siempre el más listo de la sala o el más guapo?",
    "¿Tener un botón de rebobinar vida o un botón de pausa?",
    "¿Luchar contra 100 caballos tamaño pato o 1 pato tamaño caballo?",
    "¿Comer solo pizza el resto de tu vida o solo hamburguesas?",
    "¿Poder volar o poder ser invisible?",
    "¿Tener dinero infinito pero estar solo o ser pobre pero muy querido?",
    "¿No poder mentir nunca o no poder hablar nunca?",
    "¿Llegar siempre 1 hora antes o 1 hora tarde?",
    "¿Tener hipo el resto de tu vida o sentir que vas a estornudar y no salga?",
    "¿Vivir en el pasado o en el futuro?",
];
