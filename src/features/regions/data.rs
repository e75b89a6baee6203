//! State and union territory district lists, in the order they are shown in the
//! registration form. Names are kept exactly as entered, annotations included.

/// `(region, districts)` rows. Every district list starts with [`SELECT_DISTRICT`].
///
/// [`SELECT_DISTRICT`]: crate::shared::constants::SELECT_DISTRICT
pub static REGION_TABLE: &[(&str, &[&str])] = &[
    (
        "Andhra Pradesh",
        &[
            "Select district",
            "Anantapur",
            "Chittoor",
            "East Godavari",
            "Alluri Sitarama Raju",
            "Anakapalli",
            "Annamaya",
            "Bapatla",
            "Eluru",
            "Guntur",
            "Kadapa",
            "Kakinada",
            "Konaseema",
            "Krishna",
            "Kurnool",
            "Manyam",
            "N T Rama Rap",
            "Nandyal",
            "Nellore",
            "Palnadu",
            "Prakasam",
            "Sri Balaji",
            "Sri Satya Sai",
            "Srikakulam",
            "Visakhapatnam",
            "Vizianagaram",
            "West Godavari",
        ],
    ),
    (
        "Arunachal Pradesh",
        &[
            "Select district",
            "Anjaw",
            "Siang",
            "Changlang",
            "Dibang Valley",
            "East Kameng",
            "East Siang",
            "Kamle",
            "Kra Daadi",
            "Kurung Kumey",
            "Lepa Rada",
            "Lohit",
            "Longding",
            "Lower Dibang Valley",
            "Lower Siang",
            "Lower Subansiri",
            "Namsai",
            "Pakke Kessang",
            "Papum Pare",
            "Shi Yomi",
            "Tawang",
            "Tirap",
            "Upper Siang",
            "Upper Subansiri",
            "West Kameng",
            "West Siang",
        ],
    ),
    (
        "Assam",
        &[
            "Select district",
            "Baksa",
            "Barpeta",
            "Bongaigaon",
            "Cachar",
            "Charaideo",
            "Chirang",
            "Darrang",
            "Dhemaji",
            "Dhubri",
            "Dibrugarh",
            "Dima Hasao",
            "Goalpara",
            "Golaghat",
            "Hailakandi",
            "HojaiJorhat",
            "Kamrup",
            "Kamrup Metropolitan",
            "Karbi Anglong",
            "Karimganj",
            "Kokrajhar",
            "Lakhimpur",
            "Majuli",
            "Morigaon",
            "Nagaon",
            "Nalbari",
            "Sivasagar",
            "Sonitpur",
            "South Salmara-Mankachar",
            "Tinsukia",
            "Udalguri",
            "West Karbi Anglong",
        ],
    ),
    (
        "Bihar",
        &[
            "Select district",
            "Araria",
            "Arwal",
            "Aurangabad",
            "Banka",
            "Begusarai",
            "Bhagalpur",
            "Bhojpur",
            "Buxar",
            "Darbhanga",
            "East Champaran",
            "Gaya",
            "Gopalganj",
            "Jamui",
            "Jehanabad",
            "Kaimur",
            "Katihar",
            "Khagaria",
            "Kishanganj",
            "Lakhisarai",
            "Madhepura",
            "Madhubani",
            "Munger",
            "Muzaffarpur",
            "Nalanda",
            "Nawada",
            "Patna",
            "Purnia",
            "Rohtas",
            "Saharsa",
            "Samastipur",
            "Saran",
            "Sheikhpura",
            "Sheohar",
            "Sitamarhi",
            "Siwan",
            "Supaul",
            "Vaishali",
            "West Champaran",
        ],
    ),
    (
        "Chhattisgarh",
        &[
            "Select district",
            "Balod",
            "Baloda Bazar",
            "Balrampur Ramanujganj",
            "Bastar",
            "Bemetara",
            "Bijapur",
            "Bilaspur",
            "Dantewada",
            "Dhamtari",
            "Durg",
            "Gariaband",
            "Gaurela Pendra Marwahi",
            "Janjgir Champa",
            "Jashpur",
            "Kabirdham",
            "Kanker",
            "Khairagarh",
            "Kondagaon",
            "Korba",
            "Koriya",
            "Mahasamund",
            "Manendragarh",
            "Mohla Manpur",
            "Mungeli",
            "Narayanpur",
            "Raigarh",
            "Raipur",
            "Rajnandgaon",
            "Sakti",
            "Sarangarh Bilaigarh",
            "Sukma",
            "Surajpur",
            "Surguja",
        ],
    ),
    (
        "Goa",
        &[
            "Select district",
            "North Goa",
            "South Goa",
        ],
    ),
    (
        "Gujarat",
        &[
            "Select district",
            "Ahmedabad",
            "Amreli",
            "Anand",
            "Aravalli",
            "Banaskantha",
            "Bharuch",
            "Bhavnagar",
            "Botad",
            "Chhota Udaipur",
            "Dahod",
            "Dang",
            "Devbhoomi Dwarka",
            "Gandhinagar",
            "Gir Somnath",
            "Jamnagar",
            "Junagadh",
            "Kheda",
            "Kutch",
            "Mahisagar",
            "Mehsana",
            "Morbi",
            "Narmada",
            "Navsari",
            "Panchmahal",
            "Patan",
            "Porbandar",
            "Rajkot",
            "Sabarkantha",
            "Surat",
            "Surendranagar",
            "Tapi",
            "Vadodara",
            "Valsad",
        ],
    ),
    (
        "Haryana",
        &[
            "Select district",
            "Ambala",
            "Bhiwani",
            "Charkhi Dadri",
            "Faridabad",
            "Fatehabad",
            "Gurugram",
            "Hisar",
            "Jhajjar",
            "Jind",
            "Kaithal",
            "Karnal",
            "Kurukshetra",
            "Mahendragarh",
            "Nuh",
            "Palwal",
            "Panchkula",
            "Panipat",
            "Rewari",
            "Rohtak",
            "Sirsa",
            "Sonipat",
            "Yamunanagar",
        ],
    ),
    (
        "Himachal Pradesh",
        &[
            "Select district",
            "Bilaspur",
            "Chamba",
            "Hamirpur",
            "Kangra",
            "Kinnaur",
            "Kullu",
            "Lahaul Spiti",
            "Mandi",
            "Shimla",
            "Sirmaur",
            "Solan",
            "Una",
        ],
    ),
    (
        "Jammu Kashmir",
        &[
            "Select district",
            "Anantnag",
            "Bandipora",
            "Baramulla",
            "Budgam",
            "Doda",
            "Ganderbal",
            "Jammu",
            "Kathua",
            "Kishtwar",
            "Kulgam",
            "Kupwara",
            "Poonch",
            "Pulwama",
            "Rajouri",
            "Ramban",
            "Reasi",
            "Samba",
            "Shopian",
            "Srinagar",
            "Udhampur",
        ],
    ),
    (
        "Jharkhand",
        &[
            "Select district",
            "Bokaro",
            "Chatra",
            "Deoghar",
            "Dhanbad",
            "Dumka",
            "East Singhbhum",
            "Garhwa",
            "Giridih",
            "Godda",
            "Gumla",
            "Hazaribagh",
            "Jamtara",
            "Khunti",
            "Koderma",
            "Latehar",
            "Lohardaga",
            "Pakur",
            "Palamu",
            "Ramgarh",
            "Ranchi",
            "Sahebganj",
            "Seraikela Kharsawan",
            "Simdega",
            "West Singhbhum",
        ],
    ),
    (
        "Karnataka",
        &[
            "Select district",
            "Bagalkot",
            "Bangalore Rural",
            "Bangalore Urban",
            "Belgaum",
            "Bellary",
            "Bidar",
            "Chamarajanagar",
            "Chikkaballapur",
            "Chikkamagaluru",
            "Chitradurga",
            "Dakshina Kannada",
            "Davanagere",
            "Dharwad",
            "Gadag",
            "Kalaburagi",
            "Hassan",
            "Haveri",
            "Kodagu",
            "Kolar",
            "Koppal",
            "Mandya",
            "Mysore",
            "Raichur",
            "Ramanagara",
            "Shimoga",
            "Tumkur",
            "Udupi",
            "Uttara Kannada",
            "Vijayanagara",
            "Vijayapura",
            "Yadgir",
        ],
    ),
    (
        "Kerala",
        &[
            "Select district",
            "Ernakulam",
            "Idukki",
            "Kannur",
            "Kasaragod",
            "Kollam",
            "Kottayam",
            "Kozhikode",
            "Malappuram",
            "Palakkad",
            "Pathanamthitta",
            "Thiruvananthapuram",
            "Thrissur",
            "Wayanad",
        ],
    ),
    (
        "Madhya Pradesh",
        &[
            "Select district",
            "Agar Malwa",
            "Alirajpur",
            "Anuppur",
            "Ashoknagar",
            "Balaghat",
            "Barwani",
            "Betul",
            "Bhind",
            "Bhopal",
            "Burhanpur",
            "Chachaura*",
            "Chhatarpur",
            "Chhindwara",
            "Damoh",
            "Datia",
            "Dewas",
            "Dhar",
            "Dindori",
            "Guna",
            "Gwalior",
            "Harda",
            "Hoshangabad",
            "Indore",
            "Jabalpur",
            "Jhabua",
            "Katni",
            "Khandwa",
            "Khargone",
            "Maihar*",
            "Mandla",
            "Mandsaur",
            "Morena",
            "Nagda*",
            "Narsinghpur",
            "Neemuch",
            "Niwari *",
            "Panna",
            "Raisen",
            "Rajgarh",
            "Ratlam",
            "Rewa",
            "Sagar",
            "Satna",
            "Sehore",
            "Seoni",
            "Shahdol",
            "Shajapur",
            "Sheopur",
            "Shivpuri",
            "Sidhi",
            "Singrauli",
            "Tikamgarh",
            "Ujjain",
            "Umaria",
            "Vidisha",
        ],
    ),
    (
        "Maharashtra",
        &[
            "Select district",
            "Ahmednagar",
            "Akola",
            "Amravati",
            "Aurangabad",
            "Beed",
            "Bhandara",
            "Buldhana",
            "Chandrapur",
            "Dhule",
            "Gadchiroli",
            "Gondia",
            "Hingoli",
            "Jalgaon",
            "Jalna",
            "Kolhapur",
            "Latur",
            "Mumbai City",
            "Mumbai Suburban",
            "Nagpur",
            "Nanded",
            "Nandurbar",
            "Nashik",
            "Osmanabad",
            "Palghar",
            "Parbhani",
            "Pune",
            "Raigad",
            "Ratnagiri",
            "Sangli",
            "Satara",
            "Sindhudurg",
            "Solapur",
            "Thane",
            "Wardha",
            "Washim",
            "Yavatmal",
        ],
    ),
    (
        "Manipur",
        &[
            "Select district",
            "Bishnupur",
            "Chandel",
            "Churachandpur",
            "Imphal East",
            "Imphal West",
            "Jiribam",
            "Kakching",
            "Kamjong",
            "Kangpokpi",
            "Noney",
            "Pherzawl",
            "Senapati",
            "Tamenglong",
            "Tengnoupal",
            "Thoubal",
            "Ukhrul",
        ],
    ),
    (
        "Meghalaya",
        &[
            "Select district",
            "East Garo Hills",
            "East Jaintia Hills",
            "East Khasi Hills",
            "Mairang (Eastern West Khasi Hills)",
            "North Garo Hills",
            "Ri Bhoi",
            "South Garo Hills",
            "South West Garo Hills",
            "South West Khasi Hills",
            "West Garo Hills",
            "West Jaintia Hills",
            "West Khasi Hills",
        ],
    ),
    (
        "Mizoram",
        &[
            "Select district",
            "Aizawl",
            "Champhai",
            "Hnahthial",
            "Khawzawl",
            "Kolasib",
            "Lawngtlai",
            "Lunglei",
            "Mamit",
            "Saiha",
            "Saitual",
            "Serchhip",
        ],
    ),
    (
        "Nagaland",
        &[
            "Select district",
            "Chumukedima *",
            "Dimapur",
            "Kiphire",
            "Kohima",
            "Longleng",
            "Mokokchung",
            "Mon",
            "Niuland *",
            "Noklak",
            "Peren",
            "Phek",
            "Shamator",
            "Tseminyu *",
            "Tuensang",
            "Wokha",
            "Zunheboto",
        ],
    ),
    (
        "Odisha",
        &[
            "Select district",
            "Angul",
            "Balangir",
            "Balasore",
            "Bargarh",
            "Bhadrak",
            "Boudh",
            "Cuttack",
            "Debagarh",
            "Dhenkanal",
            "Gajapati",
            "Ganjam",
            "Jagatsinghpur",
            "Jajpur",
            "Jharsuguda",
            "Kalahandi",
            "Kandhamal",
            "Kendrapara",
            "Kendujhar",
            "Khordha *",
            "Koraput",
            "Malkangiri",
            "Mayurbhanj",
            "Nabarangpur",
            "Nayagarh",
            "Nuapada",
            "Puri",
            "Rayagada",
            "Sambalpur",
            "Subarnapur",
            "Sundergarh",
        ],
    ),
    (
        "Punjab",
        &[
            "Select district",
            "Amritsar",
            "Barnala",
            "Bathinda",
            "Faridkot",
            "Fatehgarh Sahib",
            "Fazilka",
            "Firozpur",
            "Gurdaspur",
            "Hoshiarpur",
            "Jalandhar",
            "Kapurthala",
            "Ludhiana",
            "Malerkotla *",
            "Mansa",
            "Moga",
            "Mohali",
            "Muktsar",
            "Pathankot",
            "Patiala",
            "Rupnagar",
            "Sangrur",
            "Shaheed Bhagat Singh Nagar",
            "Tarn Taran",
        ],
    ),
    (
        "Rajasthan",
        &[
            "Select district",
            "Ajmer",
            "Alwar",
            "Banswara",
            "Baran",
            "Barmer",
            "Bharatpur",
            "Bhilwara",
            "Bikaner",
            "Bundi",
            "Chittorgarh",
            "Churu",
            "Dausa",
            "Dholpur",
            "Dungarpur",
            "Sri Ganganagar",
            "Hanumangarh",
            "Jaipur",
            "Jaisalmer",
            "Jalore",
            "Jhalawar",
            "Jhunjhunu",
            "Jodhpur",
            "Karauli",
            "Kota",
            "Nagaur",
            "Pali",
            "Pratapgarh",
            "Rajsamand",
            "Sawai Madhopur",
            "Sikar",
            "Sirohi",
            "Tonk",
            "Udaipur",
        ],
    ),
    (
        "Sikkim",
        &[
            "Select district",
            "East Sikkim",
            "North Sikkim",
            "Pakyong",
            "Soreng",
            "South Sikkim",
            "West Sikkim",
        ],
    ),
    (
        "Tamil Nadu",
        &[
            "Select district",
            "Ariyalur",
            "Chengalpattu *",
            "Chennai",
            "Coimbatore",
            "Cuddalore",
            "Dharmapuri",
            "Dindigul",
            "Erode",
            "Kallakurichi *",
            "Kanchipuram",
            "Kanyakumari",
            "Karur",
            "Krishnagiri",
            "Madurai",
            "Mayiladuthurai*",
            "Nagapattinam",
            "Namakkal",
            "Nilgiris",
            "Perambalur",
            "Pudukkottai",
            "Ramanathapuram",
            "Ranipet*",
            "Salem",
            "Sivaganga",
            "Tenkasi *",
            "Thanjavur",
            "Theni",
            "Thoothukudi",
            "Tiruchirappalli",
            "Tirunelveli",
            "Tirupattur*",
            "Tiruppur",
            "Tiruvallur",
            "Tiruvannamalai",
            "Tiruvarur",
            "Vellore",
            "Viluppuram",
            "Virudhunagar",
        ],
    ),
    (
        "Telangana",
        &[
            "Select district",
            "Adilabad",
            "Bhadradri Kothagudem",
            "Hyderabad",
            "Jagtial",
            "Jangaon",
            "Jayashankar Bhupalpally",
            "Jogulamba Gadwal",
            "Kamareddy",
            "Karimnagar",
            "Khammam",
            "Komaram Bheem",
            "Mahabubabad",
            "Mahbubnagar",
            "Mancherial",
            "Medak",
            "Medchal Malkajgiri",
            "Mulugu *",
            "Nagarkurnool",
            "Nalgonda",
            "Narayanpet *",
            "Nirmal",
            "Nizamabad",
            "Peddapalli",
            "Rajanna Sircilla",
            "Ranga Reddy",
            "Sangareddy",
            "Siddipet",
            "Suryapet",
            "Vikarabad",
            "Wanaparthy",
            "Warangal",
            "Hanamkonda",
            "Yadadri Bhuvanagiri",
        ],
    ),
    (
        "Tripura",
        &[
            "Select district",
            "Dhalai",
            "Gomati",
            "Khowai",
            "North Tripura",
            "Sepahijala",
            "South Tripura",
            "Unakoti",
            "West Tripura",
        ],
    ),
    (
        "Uttar Pradesh",
        &[
            "Select district",
            "Agra",
            "Aligarh",
            "Prayagraj*",
            "Ambedkar Nagar",
            "Amethi *",
            "Amroha *",
            "Auraiya",
            "Azamgarh",
            "Baghpat",
            "Bahraich",
            "Ballia",
            "Balrampur",
            "Banda",
            "Barabanki",
            "Bareilly",
            "Basti",
            "Bhadohi",
            "Bijnor",
            "Budaun",
            "Bulandshahr",
            "Chandauli",
            "Chitrakoot",
            "Deoria",
            "Etah",
            "Etawah",
            "Ayodhya *",
            "Farrukhabad",
            "Fatehpur",
            "Firozabad",
            "Gautam Buddha Nagar",
            "Ghaziabad",
            "Ghazipur",
            "Gonda",
            "Gorakhpur",
            "Hamirpur",
            "Hapur *",
            "Hardoi",
            "Hathras *",
            "Jalaun",
            "Jaunpur",
            "Jhansi",
            "Kannauj",
            "Kanpur Dehat *",
            "Kanpur Nagar",
            "Kasganj *",
            "Kaushambi",
            "Kheri",
            "Kushinagar",
            "Lalitpur",
            "Lucknow",
            "Maharajganj",
            "Mahoba",
            "Mainpuri",
            "Mathura",
            "Mau",
            "Meerut",
            "Mirzapur",
            "Moradabad",
            "Muzaffarnagar",
            "Pilibhit",
            "Pratapgarh",
            "Raebareli",
            "Rampur",
            "Saharanpur",
            "Sambhal *",
            "Sant Kabir Nagar",
            "Shahjahanpur",
            "Shamli *",
            "Shravasti",
            "Siddharthnagar",
            "Sitapur",
            "Sonbhadra",
            "Sultanpur",
            "Unnao",
            "Varanasi",
        ],
    ),
    (
        "Uttarakhand",
        &[
            "Select district",
            "Almora",
            "Bageshwar",
            "Chamoli",
            "Champawat",
            "Dehradun",
            "Haridwar",
            "Nainital",
            "Pauri",
            "Pithoragarh",
            "Rudraprayag",
            "Tehri",
            "Udham Singh Nagar",
            "Uttarkashi",
        ],
    ),
    (
        "West Bengal",
        &[
            "Select district",
            "Alipurduar",
            "Bankura",
            "Birbhum",
            "Cooch Behar",
            "Dakshin Dinajpur",
            "Darjeeling",
            "Hooghly",
            "Howrah",
            "Jalpaiguri",
            "Jhargram",
            "Kalimpong",
            "Kolkata",
            "Malda",
            "Murshidabad",
            "Nadia",
            "North 24 Parganas",
            "Paschim Bardhaman",
            "Paschim Medinipur",
            "Purba Bardhaman",
            "Purba Medinipur",
            "Purulia",
            "South 24 Parganas",
            "Uttar Dinajpur",
        ],
    ),
    (
        "Andaman and Nicobar",
        &[
            "Select district",
            "Nicobar",
            "North and Middle Andaman",
            "South Andaman",
        ],
    ),
    (
        "Chandigarh",
        &[
            "Select district",
            "Chandigarh",
        ],
    ),
    (
        "Dadra and Nagar Haveli",
        &[
            "Select district",
            "Dadra and Nagar Haveli",
        ],
    ),
    (
        "Daman and Diu",
        &[
            "Select district",
            "Daman",
            "Diu",
        ],
    ),
    (
        "Delhi",
        &[
            "Select district",
            "Central Delhi",
            "East Delhi",
            "New Delhi",
            "North Delhi",
            "North East Delhi",
            "North West Delhi",
            "Shahdara",
            "South Delhi",
            "South East Delhi",
            "South West Delhi",
            "West Delhi",
        ],
    ),
    (
        "Lakshadweep",
        &[
            "Select district",
            "Lakshadweep",
        ],
    ),
    (
        "Ladakh",
        &[
            "Select district",
            "Kargil",
            "Leh",
        ],
    ),
    (
        "Puducherry",
        &[
            "Select district",
            "Karaikal",
            "Mahe",
            "Puducherry",
            "Yanam",
        ],
    ),
    (
        "NULL",
        &[
            "Select district",
            "NULL",
        ],
    ),
];
