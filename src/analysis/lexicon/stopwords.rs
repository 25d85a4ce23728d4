//! Indonesian stop words, used when stop-word removal is enabled.

/// Indonesian function words and common fillers.
pub const INDONESIAN_STOP_WORDS: &[&str] = &[
    "ada", "adalah", "adanya", "akankah", "akhir", "akhiri", "akhirnya", "aku", "akulah", "amat",
    "amatlah", "anda", "andalah", "antar", "antara", "antaranya", "apa", "apaan", "apabila",
    "apakah", "apalagi", "apatah", "atau", "ataukah", "ataupun", "bagai", "bagaikan", "bagaimana",
    "bagaimanakah", "bagaimanapun", "bagi", "bagian", "bahkan", "bahwa", "bahwasanya", "baik",
    "bakal", "bakalan", "balik", "banyak", "bapak", "baru", "bawah", "beberapa", "begini",
    "beginian", "beginikah", "beginilah", "begitu", "begitukah", "begitulah", "begitupun",
    "bekerja", "belakang", "belakangan", "belum", "belumlah", "benar", "benarkah", "benarlah",
    "berada", "berakhir", "berakhirlah", "berapa", "berapakah", "berapalah", "berapapun",
    "berarti", "berawal", "berbagai", "berdatangan", "beri", "berikan", "berikannya", "bermacam",
    "bermacam-macam", "bermaksud", "bermula", "bersama", "bersama-sama", "bersiap",
    "bersiap-siap", "bertanya", "bertanya-tanya", "berturut", "berturut-turut", "bertutur",
    "besar", "betapa", "betulkah", "biasa", "biasanya", "bila", "bilakah", "bisa", "bisakah",
    "boleh", "bolehkah", "bolehlah", "buat", "bukan", "bukankah", "bukanlah", "bukannya", "bulan",
    "bung", "cara", "caranya", "cukup", "cukupkah", "cukuplah", "dahulu", "dalam", "dan", "dapat",
    "dari", "daripada", "datang", "dekat", "demi", "demikian", "demikianlah", "dengan", "depan",
    "di", "dia", "diakhiri", "diakhirinya", "dialah", "diantara", "diantaranya", "diberi",
    "diberikan", "diberikannya", "dibuat", "dibuatnya", "didapat", "didatangkan", "digunakan",
    "diibaratkan", "diibaratkannya", "diingat", "diingatkan", "diinginkan", "dijawab",
    "dijelaskan", "dijelaskannya", "dikarenakan", "dikatakan", "dikatakannya", "dikerjakan",
    "diketahui", "diketahuinya", "dikira", "dilakukan", "dilalui", "dilihat", "dimaksud",
    "dimaksudkan", "dimaksudkannya", "diminta", "dimintai", "dimisalkan", "dimulai", "dimulailah",
    "dimulainya", "dinamai", "dinamakan", "dini", "dipastikan", "diperbuat", "diperbuatnya",
    "dipergunakan", "diperkirakan", "diperlihatkan", "diperlukan", "diperlukannya",
    "dipersoalkan", "dipertanyakan", "dipunyai", "diri", "dirinya", "disampaikan", "disebut",
    "disebutkan", "disebutkannya", "disinilah", "ditandaskan", "ditanya", "ditanyai",
    "ditanyakan", "ditegaskan", "ditujukan", "ditunjuk", "ditunjuki", "ditunjukkan",
    "ditunjukkannya", "ditunjuknya", "dituturkan", "dituturkannya", "diucapkan", "diucapkannya",
    "diungkapkan", "dong", "dua", "dulu", "empat", "engkau", "engkaukah", "engkaulah", "entah",
    "entahlah", "guna", "guna", "hal", "hal", "hal-hal", "hampir", "hanya", "hanyalah", "hari",
    "harus", "haruslah", "harusnya", "hendak", "hendaklah", "hendaknya", "hingga", "ia", "ialah",
    "ibarat", "ibaratkan", "ibaratnya", "ibu", "ikut", "ingat", "ingin", "inginkah", "inginkan",
    "ini", "inikah", "inilah", "itu", "itukah", "itulah", "jadi", "jadilah", "jadinya", "jangan",
    "jangankan", "janganlah", "jauh", "jawab", "jawaban", "jawabnya", "jelas", "jelaskan",
    "jelaslah", "jelasnya", "jika", "jikalau", "juga", "jumlah", "justru", "kala", "kalau",
    "kalaulah", "kalaupun", "kalian", "kami", "kamilah", "kami", "kamu", "kamulah", "kan",
    "kapan", "kapankah", "kapanpun", "karena", "karenanya", "kasus", "kata", "katakan",
    "katakanlah", "katanya", "ke", "keadaan", "kebetulan", "kecil", "kedua", "keduanya",
    "keinginan", "kelamaan", "keluar", "kembali", "kemudian", "kemungkinan", "kemungkinannya",
    "kenapa", "kepada", "kepadanya", "ketika", "ketiganya", "ketika", "khususnya", "kini",
    "kinilah", "kira", "kira-kira", "kiranya", "kita", "kitalah", "kok", "lagi", "lagian", "lah",
    "lain", "lainnya", "lalu", "lama", "lamanya", "lebih", "lewat", "lima", "luar", "macam",
    "maka", "makanya", "makin", "malah", "malahan", "mampu", "mampukah", "mana", "manakah",
    "manalagi", "masa", "masalah", "masalahnya", "masih", "masihkah", "masing", "masing-masing",
    "mau", "maukah", "maupun", "melainkan", "melakukan", "melalui", "melihat", "melihatnya",
    "memang", "memastikan", "memberi", "memberikan", "membuat", "memerlukan", "memihak",
    "memiliki", "memikirkan", "memililiki", "meminta", "memintai", "memisalkan", "memperbuat",
    "mempergunakan", "memperkirakan", "memperlihatkan", "memperoleh", "mempergunakan",
    "memperkirakan", "memperlihatkan", "memperoleh", "memperolehnya", "mempersiapkan",
    "mempersoalkan", "mempertanyakan", "mempunyai", "menanti", "menanti-nanti", "menanyakkan",
    "menawar", "menawarkan", "mendapat", "mendapatkan", "mendatangi", "mendatangkan",
    "menegaskan", "mengakhiri", "mengapa", "mengatakan", "mengatakannya", "mengenai",
    "mengerjakan", "mengetahui", "menggunakan", "menghendaki", "mengibaratkan",
    "mengibaratkannya", "mengingat", "mengingatkan", "menginginkan", "mengira", "mengucapkan",
    "mengucapkannya", "mengungkapkan", "menjadi", "menjawab", "menjelaskan", "menuju", "menunjuk",
    "menunjuki", "menunjukkan", "menunjuknya", "menurut", "menuturkan", "menyampaikan",
    "menyangkut", "menyatakan", "menyebutkan", "menyeluruh", "menyiapkan", "merasa", "mereka",
    "merekalah", "merupakan", "meski", "meskipun", "meyakini", "meyakinkan", "minta", "mirip",
    "misal", "misalkan", "misalnya", "mula", "mulai", "mulailah", "mulanya", "mungkin",
    "mungkinkah", "nah", "naik", "namun", "nanti", "nantinya", "nyaris", "nyatanya", "oleh",
    "oleh karena itu", "olehnya", "pada", "padahal", "padanya", "paling", "pantas", "para",
    "pasti", "pastilah", "penting", "pentingnya", "per", "perlu", "perlukah", "perlunya",
    "pernah", "persoalan", "pertama", "pertama-tama", "pertanyaan", "pertanyakan", "pihak",
    "pihaknya", "pukul", "pula", "pun", "punya", "rasa", "rasanya", "rata", "rupanya", "saat",
    "saatnya", "saja", "sajakah", "sajalah", "saling", "sama", "sama-sama", "sambil", "sampai",
    "sampai-sampai", "sampaikan", "sana", "sangat", "sangatlah", "satu", "saya", "sayalah", "se",
    "sebab", "sebabnya", "sebagai", "sebagaimana", "sebagainya", "sebagian", "sebanyak",
    "sebegini", "sebegitu", "sebelum", "sebelumnya", "sebenarnya", "sebetulnya", "sebisanya",
    "sebuah", "sebut", "sebutlah", "sebutnya", "secara", "secukupnya", "sedang", "sedangkan",
    "sedemikian", "sedikit", "sedikitnya", "segala", "segalanya", "segera", "seharusnya",
    "sehingga", "sejak", "sejauh", "sejenak", "sekali", "sekali-kali", "sekalian", "sekaligus",
    "sekalipun", "sekarang", "sekecil", "seketika", "sekiranya", "sekitar", "sekitarnya",
    "sekalipun", "sekarang", "sekecil", "seketika", "sekiranya", "sekitar", "sekitarnya", "sela",
    "selagi", "selain", "selaku", "selalu", "selama", "selamanya", "selanjutnya", "seluruh",
    "seluruhnya", "semakin", "semakin", "sementara", "semisal", "semua", "semuanya", "semula",
    "sendiri", "sendirian", "sendirinya", "seolah", "seolah-olah", "seorang", "sepanjang",
    "sepantasnya", "sepantasnyalah", "seperlunya", "seperti", "sepertinya", "sering",
    "seringkali", "serupa", "sesaat", "sesama", "sesegera", "sesuai", "sesungguhnya",
    "sesungguhnyalah", "setelah", "setempat", "setengah", "seterusnya", "setiap", "setiakali",
    "sewaktu", "siap", "siapa", "siapakah", "siapapun", "sini", "sinilah", "soal", "soalnya",
    "suatu", "sudah", "sudahkah", "sudahlah", "supaya", "tadi", "tadinya", "tak", "tambah",
    "tambahnya", "tampak", "tampaknya", "tanpa", "tanya", "tanyakan", "tanyanya", "tap", "tapi",
    "telah", "tempat", "tentang", "tentu", "tentulah", "tentunya", "terasa", "terbanyak",
    "terdahulu", "terdapat", "terdiri", "terhenti", "terjadinya", "terkait", "terlalu",
    "terlebih", "terlebih dulu", "termasuk", "ternyata", "tersampaikan", "tersebut",
    "tersebutlah", "tertentu", "tertuju", "terus", "terutama", "tetap", "tetapi", "tiap", "tiba",
    "tiba-tiba", "tidak", "tidakkah", "tidaklah", "tidaknya", "tiga", "toh", "tunjuk", "turut",
    "tutur", "tuturnya", "ucap", "ucapnya", "uang", "ujar", "ujarnya", "umum", "umumnya",
    "ungkap", "ungkapnya", "untuk", "untuknya", "upah", "waduh", "wah", "wahai", "waktu",
    "waktunya", "walau", "walaupun", "wong", "yaitu", "yakin", "yakni", "yang",
];

